mod http_relay_tests;

mod service_provider_tests;

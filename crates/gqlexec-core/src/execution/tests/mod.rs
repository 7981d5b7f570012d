mod build_properties_tests;

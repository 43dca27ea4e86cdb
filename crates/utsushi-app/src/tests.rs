mod batch_flow_tests;

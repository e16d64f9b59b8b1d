mod submission_tests;

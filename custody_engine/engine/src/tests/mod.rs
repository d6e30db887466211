mod audit_log_tests;
mod config_test;
mod ledger_test;

// Integration tests module

mod integration {
    mod config_test;
    mod runtime_test;
    mod tasks_test;
    mod telemetry_test;
}

#![allow(dead_code)]

pub use msbuild_task_test_utils::init_tracing;

mod event_tests;
mod support;

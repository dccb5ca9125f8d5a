mod basic_integration;
mod session_scenarios;

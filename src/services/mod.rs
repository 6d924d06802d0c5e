pub mod cost_service;
pub mod openai_service;
pub mod plan_service;
pub mod planner_service;
pub mod weather_service;

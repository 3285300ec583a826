pub mod controllers;
pub mod models;
pub mod services;
pub mod validator;

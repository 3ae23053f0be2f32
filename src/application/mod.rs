pub mod load_service;

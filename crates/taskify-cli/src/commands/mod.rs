pub mod browse;
pub mod menu;
pub mod queues;
pub mod scripts;
pub mod tasks;
pub mod workers;

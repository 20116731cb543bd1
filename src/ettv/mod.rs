pub mod calculator;
pub mod cluster;
pub mod config;
pub mod construction;
pub mod export;
pub mod materials;
pub mod model;
pub mod orientation;
pub mod report;
pub mod result;
pub mod surface;

//! 服务层模块

pub mod advice;
mod threat_service;

pub use threat_service::ThreatService;

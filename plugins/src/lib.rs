//! appshell-plugins：存储与外观后端，以及从配置装配它们的工厂。

pub mod appearance;
pub mod factory;
pub mod services;
pub mod storage;

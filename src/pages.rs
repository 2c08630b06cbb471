//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (home, blog
//! index, article). Each page module handles its specific view logic and
//! utilizes shared components from the components module.

pub mod blog;
pub mod home;
pub mod post;

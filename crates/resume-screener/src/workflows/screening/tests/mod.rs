mod common;
mod features;
mod routing;
mod service;

pub mod company;
pub mod device;
pub mod media;
pub mod model;
pub mod oui;

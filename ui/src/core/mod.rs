pub mod badges;
pub mod catalog;
pub mod icons;
pub mod paths;
pub mod region;
pub mod site;
pub mod timing;

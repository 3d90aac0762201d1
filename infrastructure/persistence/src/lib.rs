pub mod json_store;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod translation {
    pub mod repository;
}

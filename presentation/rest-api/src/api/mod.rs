pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod page {
    pub mod routes;
    pub mod templates;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod params;
    pub mod routes;
}
pub mod translation {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_categories;
        pub mod get_featured;
        pub mod save_all;
        pub mod search;
    }
    pub mod translation {
        pub mod get;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_categories;
            pub mod get_featured;
            pub mod save_all;
            pub mod search;
        }
        pub mod value_objects;
    }
    pub mod translation {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
        }
    }
}

#[cfg(test)]
mod test_support;

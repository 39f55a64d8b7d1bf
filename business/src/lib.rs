pub mod application {
    pub mod site_config {
        pub mod load;
    }
}

pub mod domain {
    pub mod logger;
    pub mod site_config {
        pub mod errors;
        pub mod keys;
        pub mod model;
        pub mod source;
        pub mod value_objects;
        pub mod use_cases {
            pub mod load;
        }
    }
}

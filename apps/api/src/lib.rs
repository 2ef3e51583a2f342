pub mod config;

pub mod domain {
    pub mod contact {
        pub mod value_objects;
    }
    pub mod dataset {
        pub mod entity;
        pub mod errors;
        pub mod profile;
        pub mod rules;
        pub mod source;
        pub mod validator;
    }
    pub mod layer {
        pub mod registry;
        pub mod surface;
    }
    pub mod marker {
        pub mod entity;
        pub mod factory;
        pub mod popup;
    }
    pub mod notice {
        pub mod channel;
        pub mod entity;
    }
    pub mod quotes {
        pub mod entity;
    }
    pub mod shared {
        pub mod errors;
    }
}

pub mod application {
    pub mod load_dataset {
        pub mod dto;
        pub mod use_case;
    }
    pub mod locate_user {
        pub mod dto;
        pub mod use_case;
    }
    pub mod search_markers {
        pub mod dto;
        pub mod use_case;
    }
    pub mod submit_contact {
        pub mod dto;
        pub mod use_case;
    }
}

pub mod infrastructure {
    pub mod datasets {
        pub mod file_source;
        pub mod http_source;
    }
    pub mod feed;
    pub mod map {
        pub mod published_surface;
    }
    pub mod notices {
        pub mod notice_board;
    }
}

pub mod presentation {
    pub mod http {
        pub mod errors;
        pub mod handlers {
            pub mod contact;
            pub mod docs;
            pub mod health;
            pub mod layers;
            pub mod locate;
            pub mod map;
            pub mod notices;
            pub mod quotes;
            pub mod search;
            pub mod ws;
        }
        pub mod middleware {
            pub mod logging;
            pub mod request_id;
        }
        pub mod routes;
        pub mod state;
    }
}

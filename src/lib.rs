pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_publisher;
        pub mod tag_client;
    }
}

pub mod modules {
    pub mod assignments {
        pub mod core {
            pub mod assignment;
            pub mod errors;
            pub mod projection;
            pub mod reminder_time;
            pub mod requests;
        }
        pub mod service {
            pub mod enrichment;
            pub mod event_driven;
            pub mod port;
            pub mod store_backed;
        }
        pub mod use_cases {
            pub mod create_assignment {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_assignments {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_assignment {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_assignment {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_assignment {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_error;
                pub mod identity;
            }
            pub mod outbound {
                pub mod assignment_repository;
                pub mod assignment_repository_in_memory;
                pub mod assignment_repository_postgres;
            }
        }
    }
}

pub mod shell;

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod entity_store;
        pub mod notifications;
        pub mod remote;
    }
}

pub mod modules {
    pub mod issues {
        pub mod core {
            pub mod issue;
            pub mod queries;
        }
        pub mod use_cases {
            pub mod bulk_delete_issues {
                pub mod handler;
            }
            pub mod create_issue {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod in_memory;
        }
    }
    pub mod view_props {
        pub mod core {
            pub mod ports;
            pub mod props;
            pub mod store;
        }
        pub mod adapters {
            pub mod in_memory;
        }
    }
}

pub mod shell;

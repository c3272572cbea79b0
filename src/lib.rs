pub mod shared {
    pub mod infrastructure {
        pub mod keyed_lock;
        pub mod ledger_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod accumulator;
            pub mod calendar;
            pub mod clock;
            pub mod events;
            pub mod evolve;
            pub mod ledger;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod record_punch {
                pub mod command;
                pub mod decide;
                pub mod extraction;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_ledger {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

pub mod blurring {
    pub mod domain {
        pub mod picture_blurrer;
    }
    pub mod infrastructure;
}

pub mod imaging {
    pub mod domain {
        pub mod image_reader;
        pub mod image_writer;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod blur_image_use_case;
    pub mod image_store;
}

pub mod shared {
    pub mod blur_radius;
    pub mod constants;
    pub mod display_size;
    pub mod error;
    pub mod picture;
}

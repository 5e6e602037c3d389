pub mod image_encoder;

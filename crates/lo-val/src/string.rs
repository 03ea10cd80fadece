pub use ecow::EcoString as LoStr;

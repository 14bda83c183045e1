pub mod buf_writer;

pub use buf_writer::BufWriter;

pub mod align;
pub mod alphabet;
pub mod scoring;
pub mod simulate;
pub mod structs;

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

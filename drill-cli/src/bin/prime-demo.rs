//! Draws a number from 1 to 100 and prints whether it is prime.

extern crate drill;
extern crate env_logger;

fn main() {
    env_logger::init();
    println!("{}", drill::draw_default());
}

use fixmath::{cos, sin, SIN_ONE};

///! Plots one period of sin and cos of a 6-bit angle as text.
///!  cargo run --example sin_wave

const WIDTH: i32 = 32;

fn column(value: i32) -> usize {
    ((value + SIN_ONE) * WIDTH / SIN_ONE) as usize
}

fn main() {
    for angle in 0..64 {
        let s = sin::<6>(angle);
        let c = cos::<6>(angle);
        let mut row = vec![b' '; (2 * WIDTH + 1) as usize];
        row[WIDTH as usize] = b'|';
        row[column(c)] = b'c';
        row[column(s)] = b's';
        let row = String::from_utf8_lossy(&row);
        println!("{angle:3} {s:6} {c:6} {row}");
    }
}

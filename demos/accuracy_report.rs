use fixmath::tuning::{
    optimal_threshold, rsqrt_report, rsqrt_table_error, shift_errors,
    sin_error, sqrt_report,
};
use fixmath::{
    RsqrtTable5, RsqrtTable6, RsqrtTable7, RsqrtTable8, SinTable5, SinTable6,
    SinTable7, SinTable8, RSQRT_FRAC_BITS,
};
use tracing_subscriber::EnvFilter;

///! Measures every approximation against f64 and prints the results.
///!  RUST_LOG=debug cargo run --example accuracy_report --release

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("rsqrt truncation error by threshold:");
    for e in shift_errors(RSQRT_FRAC_BITS) {
        println!(
            "  T={:2} x={:.6} y={:.6}",
            e.threshold, e.x_error, e.y_error
        );
    }
    println!("  best T = {}", optimal_threshold(RSQRT_FRAC_BITS));

    println!("sin, 12-bit angle:");
    let sins = [
        (5, sin_error::<12, SinTable5>()),
        (6, sin_error::<12, SinTable6>()),
        (7, sin_error::<12, SinTable7>()),
        (8, sin_error::<12, SinTable8>()),
    ];
    for (bits, s) in sins {
        println!(
            "  table {bits}: total {:.2} mean {:.4} max {:.4} at {}",
            s.total_error,
            s.mean_error(),
            s.max_error,
            s.worst_input
        );
    }

    println!("rsqrt table:");
    let tables = [
        (5, rsqrt_table_error::<RsqrtTable5>()),
        (6, rsqrt_table_error::<RsqrtTable6>()),
        (7, rsqrt_table_error::<RsqrtTable7>()),
        (8, rsqrt_table_error::<RsqrtTable8>()),
    ];
    for (bits, s) in tables {
        println!(
            "  table {bits}: mean {:.4} bias {:.2} max {:.4} at {:#x}",
            s.mean_error(),
            s.total_bias,
            s.max_error,
            s.worst_input
        );
    }

    let sqrt = sqrt_report((1..u32::MAX).step_by(4099));
    println!(
        "sqrt: max relative error {:.4} at {}, {} steps at {}",
        sqrt.max_relative_error,
        sqrt.worst_relative_input,
        sqrt.max_iterations,
        sqrt.slowest_input
    );
    let rsqrt = rsqrt_report((1..u32::MAX).step_by(4099));
    println!(
        "rsqrt: max relative error {:.4} at {}, {} steps at {}",
        rsqrt.max_relative_error,
        rsqrt.worst_relative_input,
        rsqrt.max_iterations,
        rsqrt.slowest_input
    );
}

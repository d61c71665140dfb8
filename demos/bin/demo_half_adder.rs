//! Quantum Half Adder Demo
//!
//! Demonstrates building a one-bit half adder circuit and sampling it
//! with the local statevector sampler.

use clap::Parser;

use alsvid_demos::circuits::half_adder;
use alsvid_demos::{
    create_progress_bar, print_header, print_info, print_result, print_section, print_success,
};
use alsvid_sim::Sampler;

#[derive(Parser, Debug)]
#[command(name = "demo-half-adder")]
#[command(about = "Demonstrate one-bit binary addition on a quantum circuit")]
struct Args {
    /// First input bit (0 or 1)
    #[arg(short = 'a', long, default_value = "1")]
    input_a: u8,

    /// Second input bit (0 or 1)
    #[arg(short = 'b', long, default_value = "1")]
    input_b: u8,

    /// Number of measurement shots
    #[arg(short, long, default_value = "1024")]
    shots: u32,

    /// Print the sampling result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Setup logging
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("Quantum Half Adder Demo");

    // Validate inputs
    if args.input_a > 1 || args.input_b > 1 {
        eprintln!(
            "Error: inputs must be 0 or 1 (got a={}, b={})",
            args.input_a, args.input_b
        );
        std::process::exit(1);
    }

    let sum = args.input_a ^ args.input_b;
    let carry = args.input_a & args.input_b;
    let expected = format!("{}{}{}", args.input_a, sum, carry);

    print_section("Problem Setup");
    print_result("Input a", args.input_a);
    print_result("Input b", args.input_b);
    print_result("Expected sum (a XOR b)", sum);
    print_result("Expected carry (a AND b)", carry);
    print_result("Expected outcome", format!("|{expected}⟩"));

    print_section("Circuit Generation");
    let circuit = half_adder(args.input_a == 1, args.input_b == 1);
    print_result("Circuit depth", circuit.depth());
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());
    print_result("Operations", circuit.num_ops());

    print_section("Sampling");
    let sampler = Sampler::new();
    let pb = create_progress_bar(u64::from(args.shots), "Sampling...");
    let result = match sampler.run(&circuit, args.shots) {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            eprintln!("Error: sampling failed: {e}");
            std::process::exit(1);
        }
    };
    pb.finish_with_message("Sampling complete");

    print_section("Measured Counts");
    for (bitstring, count) in result.counts.sorted() {
        let pct = 100.0 * count as f64 / f64::from(result.shots);
        print_result(bitstring, format!("{count} ({pct:.1}%)"));
    }

    print_section("Verification");
    let hits = result.counts.get(&expected);
    if hits == u64::from(result.shots) {
        print_success(&format!(
            "{} + {} = sum {}, carry {}: all {} shots returned |{}⟩",
            args.input_a, args.input_b, sum, carry, result.shots, expected
        ));
    } else {
        eprintln!(
            "Error: expected |{}⟩ on every shot, got {} of {}",
            expected, hits, result.shots
        );
        std::process::exit(1);
    }

    if args.json {
        print_section("Result JSON");
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("  Error serializing result: {e}"),
        }
    }

    println!();
    print_success("Half adder demo complete!");
    println!();
    print_info("The adder itself is only two gates:");
    println!("  - CCX computes the carry a AND b onto qubit 2");
    println!("  - CX then overwrites qubit 1 with the sum a XOR b");
}

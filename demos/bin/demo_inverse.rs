//! Circuit Inversion Demo
//!
//! Demonstrates the circuit inverter: adjoint construction, transparent
//! stripping of trailing measurements, and the error reported when a
//! measurement sits between gates.

use clap::Parser;

use alsvid_demos::circuits::half_adder;
use alsvid_demos::{print_header, print_info, print_result, print_section, print_success};
use alsvid_ir::qubit::{ClbitId, QubitId};
use alsvid_ir::{Circuit, inverse};
use alsvid_sim::Sampler;

#[derive(Parser, Debug)]
#[command(name = "demo-inverse")]
#[command(about = "Demonstrate circuit inversion with measurement stripping")]
struct Args {
    /// Number of shots for the roundtrip check
    #[arg(short, long, default_value = "1024")]
    shots: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Setup logging
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("Circuit Inversion Demo");

    if args.shots == 0 {
        eprintln!("Error: shot count must be at least 1");
        std::process::exit(1);
    }

    print_section("Original Circuit");
    let circuit = half_adder(true, true);
    print_result("Name", circuit.name());
    print_result("Operations", circuit.num_ops());
    print_result("Classical bits", circuit.num_clbits());
    print_ops(&circuit);

    print_section("Inversion");
    print_info("Measurements have no adjoint. The inverter strips the trailing");
    println!("  measurement block and inverts the remaining gate sequence.");
    let inverted = match inverse(&circuit) {
        Ok(inverted) => inverted,
        Err(e) => {
            eprintln!("Error: inversion failed: {e}");
            std::process::exit(1);
        }
    };
    print_result("Operations", inverted.num_ops());
    print_result("Classical bits", inverted.num_clbits());
    print_ops(&inverted);

    print_section("Roundtrip Verification");
    let mut gates_only = circuit.clone();
    gates_only.remove_final_measurements();
    let roundtrip = compose("roundtrip", &gates_only, &inverted);
    print_result("Composed operations", roundtrip.num_ops());

    let sampler = Sampler::new();
    match sampler.run(&roundtrip, args.shots) {
        Ok(result) => {
            let zeros = result.counts.get("000");
            if zeros == u64::from(args.shots) {
                print_success(&format!(
                    "All {} shots returned |000⟩: the inverse undoes the adder",
                    args.shots
                ));
            } else {
                eprintln!(
                    "Error: expected |000⟩ on every shot, got {} of {}",
                    zeros, args.shots
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: sampling failed: {e}");
            std::process::exit(1);
        }
    }

    print_section("Uninvertible Circuits");
    let mut mid = Circuit::with_size("mid_measure", 1, 1);
    mid.h(QubitId(0)).unwrap();
    mid.measure(QubitId(0), ClbitId(0)).unwrap();
    mid.x(QubitId(0)).unwrap();
    print_ops(&mid);
    println!();
    match inverse(&mid) {
        Ok(_) => {
            eprintln!("Error: expected inversion of a mid-circuit measurement to fail");
            std::process::exit(1);
        }
        Err(e) => {
            print_result("Reported error", e);
            print_info("Only trailing measurements are stripped. A measurement");
            println!("  between gates makes the circuit uninvertible.");
        }
    }

    println!();
    print_success("Inversion demo complete!");
}

fn print_ops(circuit: &Circuit) {
    for (i, inst) in circuit.instructions().iter().enumerate() {
        let operands: Vec<String> = inst.qubits.iter().map(ToString::to_string).collect();
        println!("  {:>3}: {:<8} {}", i, inst.name(), operands.join(", "));
    }
}

fn compose(name: &str, first: &Circuit, second: &Circuit) -> Circuit {
    let mut combined = first.copy_empty(name);
    for inst in first.instructions().iter().chain(second.instructions()) {
        combined.apply(inst.clone()).unwrap();
    }
    combined
}

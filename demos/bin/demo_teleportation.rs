//! Quantum Teleportation Setup Demo
//!
//! Demonstrates the entanglement layer of the teleportation protocol:
//! building the circuit, inspecting the resulting statevector, and
//! undoing the circuit with the inverter.

use clap::Parser;

use alsvid_demos::circuits::teleportation_setup;
use alsvid_demos::{print_header, print_info, print_result, print_section, print_success};
use alsvid_ir::{Circuit, inverse};
use alsvid_sim::Statevector;

#[derive(Parser, Debug)]
#[command(name = "demo-teleportation")]
#[command(about = "Demonstrate the teleportation entanglement setup")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Setup logging
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("Quantum Teleportation Setup Demo");

    print_section("Circuit Generation");
    let circuit = teleportation_setup();
    print_result("Qubits", circuit.num_qubits());
    print_result("Depth", circuit.depth());
    print_result("Gate count", circuit.num_ops());
    println!();
    for (i, inst) in circuit.instructions().iter().enumerate() {
        let operands: Vec<String> = inst.qubits.iter().map(ToString::to_string).collect();
        println!("  {:>3}: {:<8} {}", i, inst.name(), operands.join(", "));
    }

    print_section("Resulting State");
    let state = statevector_of(&circuit);
    println!("  Nonzero-probability basis states:");
    let dim = 1usize << state.num_qubits();
    for outcome in 0..dim {
        let p = state.probability(outcome);
        if p > 1e-12 {
            print_result(
                &format!("P(|{}⟩)", state.outcome_to_bitstring(outcome)),
                format!("{p:.4}"),
            );
        }
    }
    println!();
    print_info("Half the probability on |000⟩ and half on |111⟩: a GHZ state.");
    println!("  All three qubits are entangled. Measuring any one of them");
    println!("  collapses the other two to the same value.");

    print_section("Demo Narrative");
    println!("  Teleportation transfers the state of qubit 0 to qubit 2 using");
    println!("  this shared entanglement plus two classical bits:");
    println!("  1. The sender entangles the payload with qubit 0 and measures both");
    println!("  2. The two measurement outcomes travel over a classical channel");
    println!("  3. The receiver applies X and/or Z to qubit 2 accordingly");
    println!();
    println!("  This demo builds the entanglement layer only, keeping the");
    println!("  circuit measurement-free so it stays invertible.");

    print_section("Inversion Check");
    let inverted = match inverse(&circuit) {
        Ok(inverted) => inverted,
        Err(e) => {
            eprintln!("Error: inversion failed: {e}");
            std::process::exit(1);
        }
    };
    print_result("Inverse gate count", inverted.num_ops());

    let mut state = statevector_of(&circuit);
    for inst in inverted.instructions() {
        state.apply(inst).unwrap();
    }
    let p_zero = state.probability(0);
    print_result("P(|000⟩) after undo", format!("{p_zero:.4}"));
    if (p_zero - 1.0).abs() > 1e-9 {
        eprintln!("Error: inverse failed to restore |000⟩ (P = {p_zero:.4})");
        std::process::exit(1);
    }
    print_success("The inverse returns the register to |000⟩");

    println!();
    print_success("Teleportation setup demo complete!");
}

fn statevector_of(circuit: &Circuit) -> Statevector {
    let mut state = Statevector::new(circuit.num_qubits());
    for inst in circuit.instructions() {
        state.apply(inst).unwrap();
    }
    state
}

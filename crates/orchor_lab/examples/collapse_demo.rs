//! Five-protofilament collapse demonstration.
//!
//! Builds the fixed 5-qubit sequence (superposition, chain entanglement,
//! decoherence Paulis, measurement-conditioned correction, mixed-basis
//! readout), samples it, and prints the measurement histogram.

use orchor_analysis::prelude::*;
use orchor_backend::prelude::*;
use orchor_lab::scenarios;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║           Five-Protofilament Collapse Simulation             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let backend = TrajectoryBackend::new(scenarios::COLLAPSE_QUBITS);
    let conditional = backend.supports_conditional();
    if !conditional {
        println!("Backend cannot run conditioned gates; using the unconditional path.\n");
    }

    println!("Circuit construction:");
    println!("  1. Superposition: H on protofilaments 0, 1, 2");
    println!("  2. Entanglement:  CNOT chain 0→1→2→3→4");
    println!("  3. Decoherence:   Z(0) phase noise, X(1) bit flip, Y(2) combined");
    println!("  4. Collapse:      measure protofilament 0{}",
        if conditional {
            ", then X(1) if c[0] = 1"
        } else {
            " (no conditional propagation)"
        }
    );
    println!("  5. Readout:       X basis on 3 and 4, Z basis on 1 and 2\n");

    let circuit = scenarios::collapse_5q(conditional);
    println!("{}", circuit);
    println!("{}", circuit.draw());

    println!(
        "Sampling {} shots on '{}'...\n",
        scenarios::COLLAPSE_SHOTS,
        backend.name()
    );
    let result = backend
        .execute(&circuit, scenarios::COLLAPSE_SHOTS)
        .expect("collapse simulation failed");

    println!("Measurement histogram:");
    println!("{}", chart::histogram(&result.counts, result.shots));

    let summary = CountsSummary::from_counts(&result.counts, scenarios::COLLAPSE_QUBITS);
    println!("{}", Reporter::counts_report(&summary, ReportFormat::Text));
}

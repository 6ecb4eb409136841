//! Whole-network checks: every value is produced by a live feedback loop.

use pnp_bricks::{copy2, plus1, plus_p, prefix};
use pnp_chan::{Receiver, channel, spawn};
use pnp_networks::{fibonacci, integrate, numbers, pairs, reverse_integrate, squares};

fn take(rx: &Receiver<i64>, n: usize) -> Vec<i64> {
    (0..n).map(|_| rx.recv().unwrap()).collect()
}

#[test]
fn numbers_counts_from_initial() {
    let (tx, rx) = channel();
    numbers(tx, 1).unwrap();
    assert_eq!(take(&rx, 9), (1..10).collect::<Vec<_>>());
}

#[test]
fn integrate_emits_running_sums() {
    let (n_tx, n_rx) = channel();
    let (i_tx, i_rx) = channel();
    numbers(n_tx, 0).unwrap();
    integrate(n_rx, i_tx).unwrap();

    let sums = take(&i_rx, 11);
    assert_eq!(sums[9], 45);
    assert_eq!(sums[10], 55);
}

#[test]
fn pairs_sums_neighbours() {
    let (in_tx, in_rx) = channel();
    let (out_tx, out_rx) = channel();
    pairs(in_rx, out_tx).unwrap();
    std::thread::spawn(move || {
        for v in 0..5 {
            in_tx.send(v).unwrap();
        }
    });
    assert_eq!(take(&out_rx, 4), vec![1, 3, 5, 7]);
}

#[test]
fn squares_are_squares() {
    let (tx, rx) = channel();
    squares(tx).unwrap();
    assert_eq!(take(&rx, 9), vec![1, 4, 9, 16, 25, 36, 49, 64, 81]);
}

#[test]
fn reverse_integrate_undoes_integrate() {
    let (n_tx, n_rx) = channel();
    let (i_tx, i_rx) = channel();
    let (r_tx, r_rx) = channel();
    numbers(n_tx, 0).unwrap();
    integrate(n_rx, i_tx).unwrap();
    reverse_integrate(i_rx, r_tx).unwrap();

    assert_eq!(take(&r_rx, 10), (0..10).collect::<Vec<_>>());
}

#[test]
fn fibonacci_sequence() {
    let (tx, rx) = channel();
    fibonacci(tx).unwrap();
    assert_eq!(take(&rx, 10), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn barrier_combiner_runs_inside_a_feedback_loop() {
    let (a_tx, a_rx) = channel();
    let (b_tx, b_rx) = channel();
    let (c_tx, c_rx) = channel();
    let (d_tx, d_rx) = channel();
    let (e_tx, e_rx) = channel();
    let (f_tx, f_rx) = channel();
    let (g_tx, g_rx) = channel();
    let (h_tx, h_rx) = channel();
    spawn("prefix", move || prefix(c_rx, a_tx, 0)).unwrap();
    spawn("copy2", move || copy2(a_rx, b_tx, d_tx)).unwrap();
    spawn("plus1", move || plus1(b_rx, c_tx)).unwrap();
    spawn("plus_p", move || plus_p(d_rx, g_rx, e_tx)).unwrap();
    spawn("prefix", move || prefix(f_rx, g_tx, 0)).unwrap();
    spawn("copy2", move || copy2(e_rx, f_tx, h_tx)).unwrap();

    let sums = take(&h_rx, 10);
    assert_eq!(sums.last(), Some(&45));
}

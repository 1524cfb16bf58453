extern crate multitask;
extern crate simple_logger;

use multitask::{load_labels, load_matrix, transfer_multitask_l12_logistic_regression};

fn main() {
    simple_logger::init().unwrap();

    println!("TransferMultitaskL12LogisticRegression");

    let fm_train = load_matrix("data/fm_train_real.dat").unwrap();
    let fm_test = load_matrix("data/fm_test_real.dat").unwrap();
    let label_train = load_labels("data/label_train_twoclass.dat").unwrap();

    transfer_multitask_l12_logistic_regression(&fm_train, &fm_test, &label_train).unwrap();
}

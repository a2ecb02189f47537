use terntree::prelude::*;

use std::process::exit;

const USAGE: &str = "[USAGE] terntree [table file (train)] [table file (test)]";

fn main() {
    let mut args = std::env::args().skip(1);

    // Read the train file
    let path = args.next().expect(USAGE);
    let train = read_sample(&path);

    // Read the test file
    let path = args.next().expect(USAGE);
    let test = read_sample(&path);

    let tree = Id3::default().induce(&train);

    println!("{tree}");
    println!();

    report("training", &tree, &train);
    report("test", &tree, &test);
}

fn read_sample(path: &str) -> Sample {
    SampleReader::default()
        .file(path)
        .read()
        .unwrap_or_else(|e| {
            eprintln!("terntree: {path}: {e}");
            exit(1);
        })
}

fn report<H>(which: &str, f: &H, sample: &Sample)
    where H: Classifier
{
    let n_example = sample.shape().0;
    let accuracy = f.accuracy(sample);

    println!("Accuracy on {which} set ({n_example} instances): {accuracy:.1}%");
}

pub mod fasta;
pub mod reads;

pub mod a001_samplest;

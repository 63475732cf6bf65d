mod result_assembler;

pub use result_assembler::assemble;

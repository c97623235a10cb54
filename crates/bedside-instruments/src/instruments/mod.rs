pub mod sofa;

mod describe;
mod index;

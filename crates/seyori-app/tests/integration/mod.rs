mod helpers;

mod export;

#[cfg(test)]
mod common;


#[cfg(test)]
mod selection_tests;


#[cfg(test)]
mod focus_tests;

#[cfg(test)]
mod form_submit_tests;

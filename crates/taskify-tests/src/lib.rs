#[cfg(test)]
mod fakes;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod draft_tests;
#[cfg(test)]
mod executor_tests;
#[cfg(test)]
mod pagination_tests;
#[cfg(test)]
mod status_tests;

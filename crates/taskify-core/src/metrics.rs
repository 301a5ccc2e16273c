use metrics::counter;

pub fn record_link_parse_failure(link: &str) {
    counter!("taskify_link_parse_failures_total", "link" => link.to_string()).increment(1);
}

pub fn record_stale_response(view: &str) {
    counter!("taskify_stale_responses_total", "view" => view.to_string()).increment(1);
}

pub fn record_task_fetch_failure() {
    counter!("taskify_task_fetch_failures_total").increment(1);
}

pub fn record_count_poll_failure() {
    counter!("taskify_count_poll_failures_total").increment(1);
}

pub fn record_ignored_param(key: &str) {
    counter!("taskify_ignored_params_total", "key" => key.to_string()).increment(1);
}

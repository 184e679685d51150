mod tests_builder;
mod tests_resolver_driven;

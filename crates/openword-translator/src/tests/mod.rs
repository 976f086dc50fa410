mod fake_fetcher;

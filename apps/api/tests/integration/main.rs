mod test_smoke_flows;

mod helpers;
mod recommendation_test;
mod router_test;

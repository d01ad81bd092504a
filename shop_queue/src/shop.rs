//! The shop: a fixed, ordered pool of servers with linear-scan queries.
//!
//! The scans are a deliberate fixed-priority policy, not a shortcut: the
//! first matching server in stored order always wins, which is what makes
//! assignment order observable and reproducible in tied scenarios.

use crate::ServerId;
use crate::server::Server;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    servers: Vec<Server>,
}

impl Shop {
    /// A shop with servers `S0..S<n>`, in that stored order.
    pub fn new(num_servers: usize) -> Shop {
        Shop {
            servers: (0..num_servers).map(Server::new).collect(),
        }
    }

    pub fn num_servers(&self) -> usize {
        self.servers.len()
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// The server with the given id. Ids are array indices, so this never
    /// scans.
    pub fn server(&self, id: ServerId) -> Server {
        self.servers[id]
    }

    /// First server in stored order with no customer in service.
    pub fn find_idle_server(&self) -> Option<Server> {
        self.servers.iter().copied().find(Server::is_idle)
    }

    /// First server in stored order whose waiting slot is empty, busy or
    /// not.
    pub fn find_server_with_no_waiting_customer(&self) -> Option<Server> {
        self.servers
            .iter()
            .copied()
            .find(|server| !server.has_waiting_customer())
    }

    /// Replace the server whose id matches `server`. Size and order never
    /// change.
    pub fn update(mut self, server: Server) -> Shop {
        self.servers[server.id()] = server;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_idle_server_picks_the_first_in_stored_order() {
        let shop = Shop::new(3);
        let first = shop.find_idle_server().unwrap();
        assert_eq!(first.id(), 0);

        let shop = shop.update(first.serve(0));
        assert_eq!(shop.find_idle_server().unwrap().id(), 1);
    }

    #[test]
    fn find_idle_server_on_all_busy_is_none() {
        let shop = Shop::new(2)
            .update(Server::new(0).serve(0))
            .update(Server::new(1).serve(1));
        assert!(shop.find_idle_server().is_none());
    }

    #[test]
    fn waiting_slot_query_ignores_busyness() {
        // S0 busy with an empty slot still beats idle S1.
        let shop = Shop::new(2).update(Server::new(0).serve(0));
        assert_eq!(shop.find_server_with_no_waiting_customer().unwrap().id(), 0);
    }

    #[test]
    fn queries_are_idempotent_without_an_update() {
        let shop = Shop::new(2).update(Server::new(0).serve(9));
        assert_eq!(shop.find_idle_server(), shop.find_idle_server());
        assert_eq!(
            shop.find_server_with_no_waiting_customer(),
            shop.find_server_with_no_waiting_customer()
        );
    }

    #[test]
    fn update_preserves_size_order_and_other_servers() {
        let shop = Shop::new(3);
        let before: Vec<ServerId> = shop.servers().iter().map(Server::id).collect();

        let shop = shop.update(Server::new(1).serve(4));
        let after: Vec<ServerId> = shop.servers().iter().map(Server::id).collect();

        assert_eq!(before, after);
        assert_eq!(shop.num_servers(), 3);
        assert!(shop.server(0).is_idle());
        assert_eq!(shop.server(1).current_customer(), Some(4));
        assert!(shop.server(2).is_idle());
    }

    #[test]
    fn empty_shop_answers_every_query_with_none() {
        let shop = Shop::new(0);
        assert!(shop.find_idle_server().is_none());
        assert!(shop.find_server_with_no_waiting_customer().is_none());
    }
}

mod registers_default_servers_contract;

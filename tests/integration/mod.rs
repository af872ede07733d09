mod sale_lifecycle;
